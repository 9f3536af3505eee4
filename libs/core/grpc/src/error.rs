//! Extension traits that turn plain errors into `tonic::Status`.

/// Extension trait for Result types to convert errors to tonic::Status
///
/// # Example
/// ```ignore
/// use core_grpc::conversions::parse_uuid;
/// use core_grpc::error::ToTonicResult;
///
/// // A malformed id becomes INVALID_ARGUMENT
/// let id = parse_uuid(&req.id).to_tonic()?;
/// ```
pub trait ToTonicResult<T> {
  /// Convert the error in this Result to a tonic::Status with INVALID_ARGUMENT code
  fn to_tonic(self) -> Result<T, tonic::Status>;
}

impl<T> ToTonicResult<T> for Result<T, String> {
  fn to_tonic(self) -> Result<T, tonic::Status> {
    self.map_err(tonic::Status::invalid_argument)
  }
}
