mod go_toolchain;

pub use go_toolchain::GoToolchain;
