//! Component types and the type/revision lookup

pub mod aggregate;

pub use aggregate::{
    revisions_of, ComponentType, ComponentTypeRevisions, NewComponentType,
    SetComponentTypeParams, SET_COMPONENT_TYPE_PATH, TYPES_AND_REVISIONS_PATH,
};
