// ── Bench Core: Constants ──────────────────────────────────────────────────
// Named constants for the crate live here, grouped by subsystem, so a
// value change never means hunting through call sites.

// ── Module registration ────────────────────────────────────────────────────
// The application layer looks the native module up under this name and the
// host registry routes calls with it. Changing the value breaks routing for
// every caller. Treat as a stable identifier.
pub const MODULE_NAME: &str = "Bench";
