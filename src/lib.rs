#![warn(clippy::all, rust_2018_idioms)]
//! Desktop front-end for the PDF to Audio service: upload a PDF, then play
//! or download the narrated audio it produces.

mod app;
mod ui;

pub use app::PdfToAudioApp;
