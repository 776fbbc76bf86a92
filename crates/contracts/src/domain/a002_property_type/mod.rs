pub mod aggregate;

pub use aggregate::{
    NewPropertyType, PropertyType, SetPropertyTypeParams, SET_PROPERTY_TYPE_PATH,
};
