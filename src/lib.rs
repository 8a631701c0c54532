use serde::{Serialize, Deserialize};

pub mod statistics;
pub mod plot;
pub mod scene;
pub mod animation;
pub mod visualize;

macro_rules! define_float {
    ($f:tt) => {
        pub use std::$f as float;
        pub type Float = $f;
    }
}

define_float!(f64);

pub const DISPLAY_DECIMAL_PLACES: i32 = 4;

#[derive(Debug,Serialize,Deserialize,Clone)]
pub struct RuntimeConf {
    pub output_folder: String,
    pub frame_width: u32,
    pub frame_height: u32,
    pub frames_per_second: usize
}

pub fn load_runtime_conf() -> RuntimeConf {
    let conf_string = std::fs::read_to_string("runtime_conf.yaml").expect("Unable to read runtime_conf.yaml");
    serde_yaml::from_str(&conf_string).expect("Unable to parse runtime_conf.yaml")
}
