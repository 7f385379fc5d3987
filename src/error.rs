// A tiny error type so we don't rely on anyhow/thiserror.
// Every variant states *where* things went wrong.
use std::fmt::{self, Display};

#[derive(Debug)]
pub enum Error {
    WindowInit(String),   // Creating the window failed
    WindowUpdate(String), // Updating the window buffer failed
    SurfaceInit(String),  // Allocating the drawing surface failed
    Config(String),       // Reading/parsing config.toml failed
    Export(String),       // Writing the canvas to an image file failed
}

impl Display for Error {
    // This decides how the error is printed to your console.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::WindowInit(s) => write!(f, "Window init error: {s}"),
            Error::WindowUpdate(s) => write!(f, "Window update error: {s}"),
            Error::SurfaceInit(s) => write!(f, "Surface init error: {s}"),
            Error::Config(s) => write!(f, "Config error: {s}"),
            Error::Export(s) => write!(f, "Export error: {s}"),
        }
    }
}

impl std::error::Error for Error {}
