pub mod dashboard;
pub mod login;
pub mod register;

/// Logical navigation targets a controller can send the host to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Surface {
    Login,
    Dashboard,
}

/// A deferred navigation: the host moves to `target` after `delay_ms`.
/// Carried as data so the host owns when, and whether, to move.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Navigation {
    pub target: Surface,
    pub delay_ms: u64,
}
