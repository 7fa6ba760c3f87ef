// Two security tiers: public (no auth, token acquisition) and
// protected (JWT required, everything else under /api).
pub mod protected;
pub mod public;
