pub mod impl_climate_control;
pub mod impl_light;
pub mod impl_lock;
pub mod interface;
