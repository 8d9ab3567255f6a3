// Adaptive scoring: résumé facts + job requirements → weighted 0–100 composite,
// match report and recommendations. Deterministic, no I/O.

pub mod adaptive;
pub mod models;
pub mod recommendations;

pub use adaptive::compute_adaptive_score;
pub use models::AdaptiveScoreResult;
