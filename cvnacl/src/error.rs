#[non_exhaustive]
#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("Missing required policy")]
    PolicyRequired,
}
