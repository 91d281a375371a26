pub mod get_last;
pub mod get_types;

pub use get_last::GetLastMeasurementUseCase;
pub use get_types::GetMeasurementTypesUseCase;
