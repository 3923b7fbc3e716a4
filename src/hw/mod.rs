pub mod inputs;
pub mod led;
pub mod pins;
pub mod timer;
pub mod usart;

pub use inputs::EncoderInputs;
pub use led::Led;
pub use pins::BoardPins;
pub use timer::TickTimer;
pub use usart::{FrameLink, Usart};
