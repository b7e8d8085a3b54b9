/* In-memory interleaved pixel buffers and resampling */
pub mod channel;
pub mod imagebuffer;
pub mod interpolation;

pub use channel::Channel;
pub use imagebuffer::ImageBuffer;
pub use interpolation::Interpolation;
