//! Pick the first line of a file containing a word, then print the line after it

use async_std::io::{prelude::*, BufReader};
use async_std::stream::StreamExt;
use nthline::{AsyncLocateLine, Ordinal};

#[async_std::main]
async fn main() {
    let path = "<some file>";

    // Find the line number of the first match
    let file = async_std::fs::File::open(path).await.unwrap();
    let mut lines = BufReader::new(file).lines();
    let mut matched = None;
    let mut number = 0;
    while let Some(line) = lines.next().await {
        number += 1;
        if line.unwrap().contains("xyz") {
            matched = Some(number);
            break;
        }
    }

    let next = match matched.and_then(|n| Ordinal::new(n + 1)) {
        Some(next) => next,
        None => return,
    };

    // Reopen and pick the following line
    let mut scanner = nthline::open_async(path).await.unwrap();
    match scanner.locate(next).await {
        Ok(line) => println!("{}", String::from_utf8_lossy(line.as_bytes())),
        Err(err) => eprintln!("{}", err),
    }
}
