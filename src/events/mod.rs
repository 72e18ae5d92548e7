pub mod countdown;
pub mod navigation;
pub mod pointer;
pub mod reveal;
pub mod sections;

pub use countdown::wire_countdown;
pub use navigation::wire_navigation;
pub use pointer::wire_particle_input;
pub use reveal::wire_reveal;
pub use sections::wire_section_toggles;
