/// Errors returned by the transition detector.
#[derive(thiserror::Error, Debug)]
pub enum DetectError {
    /// The response is (near-)constant, so standardization is meaningless:
    /// a flat scan carries no signal to threshold.
    #[error("degenerate response: standard deviation {std:.3e} is below 1e-12")]
    DegenerateResponse { std: f64 },
}
