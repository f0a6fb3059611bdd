//! UF -> City Cascade
//!
//! Tracks the locality request issued for the current UF selection so a
//! response for an older selection can be recognised and dropped.

/// Identifies one dispatched locality request
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LocalityTicket {
    pub uf: String,
    generation: u64,
}

impl LocalityTicket {
    pub fn generation(&self) -> u64 {
        self.generation
    }
}

#[derive(Debug, Clone, Default)]
pub struct LocalityCascade {
    generation: u64,
    in_flight: Option<LocalityTicket>,
}

impl LocalityCascade {
    pub fn new() -> Self {
        Self::default()
    }

    /// Forget the in-flight request without issuing a new one
    pub fn invalidate(&mut self) {
        self.generation += 1;
        if let Some(stale) = self.in_flight.take() {
            log::debug!("[CASCADE] Dropping in-flight request for UF {}", stale.uf);
        }
    }

    /// Invalidate the in-flight request and dispatch a new one for `uf`
    pub fn begin(&mut self, uf: &str) -> LocalityTicket {
        self.invalidate();
        let ticket = LocalityTicket { uf: uf.to_string(), generation: self.generation };
        self.in_flight = Some(ticket.clone());
        ticket
    }

    /// Consume `ticket` if it is the in-flight request. A stale ticket leaves state untouched.
    pub fn complete(&mut self, ticket: &LocalityTicket) -> bool {
        if self.in_flight.as_ref() == Some(ticket) {
            self.in_flight = None;
            true
        } else {
            false
        }
    }

    pub fn is_pending(&self) -> bool {
        self.in_flight.is_some()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_latest_ticket_wins() {
        let mut cascade = LocalityCascade::new();
        let rs = cascade.begin("RS");
        let sc = cascade.begin("SC");
        assert_ne!(rs.generation(), sc.generation());

        assert!(!cascade.complete(&rs));
        assert!(cascade.is_pending());
        assert!(cascade.complete(&sc));
        assert!(!cascade.is_pending());
    }

    #[test]
    fn test_ticket_completes_once() {
        let mut cascade = LocalityCascade::new();
        let rs = cascade.begin("RS");
        assert!(cascade.complete(&rs));
        assert!(!cascade.complete(&rs));
    }

    #[test]
    fn test_same_uf_reselected_invalidates_old_ticket() {
        let mut cascade = LocalityCascade::new();
        let first = cascade.begin("RS");
        let second = cascade.begin("RS");
        assert!(!cascade.complete(&first));
        assert!(cascade.complete(&second));
    }

    #[test]
    fn test_invalidate_drops_in_flight() {
        let mut cascade = LocalityCascade::new();
        let rs = cascade.begin("RS");
        cascade.invalidate();
        assert!(!cascade.is_pending());
        assert!(!cascade.complete(&rs));
    }
}
