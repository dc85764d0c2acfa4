mod animation;
mod counter;
mod indicator;
mod render_state;
mod ui;
mod wave;
mod wave_renderer;
pub mod util;

pub use animation::*;
pub use counter::*;
pub use indicator::*;
pub use render_state::*;
pub use ui::*;
pub use wave::*;
pub use wave_renderer::*;
