pub mod color;
pub mod data;
pub mod export;
pub mod loading;
pub mod nearest;
pub mod point;
pub mod scale;
pub mod selection;
pub mod state;
