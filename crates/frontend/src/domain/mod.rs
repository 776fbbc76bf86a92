pub mod a001_component_type;
pub mod a002_property_type;
pub mod a003_component;
