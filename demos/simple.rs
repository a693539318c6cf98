//! Read a given line of a file

use nthline::{Ordinal, Source};

fn main() {
    // Open the file. It gets closed once `locate` is done with it
    let source = Source::File("<some file>".into());
    let input = source.open().unwrap();

    // Read line 30 without reading any further
    let line_30 = nthline::locate(input, Ordinal::new(30).unwrap()).unwrap();

    println!("{}", line_30.into_string().unwrap());
}
