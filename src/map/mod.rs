mod label_map;
mod reverse;

pub use label_map::LabelMap;
