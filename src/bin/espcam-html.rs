use std::{env, process};

use espcam_decompress::{Error, decompress_html_file};

fn main() {
    let Some(path) = env::args().nth(1) else {
        eprintln!("usage: espcam-html <camera_index.h>");
        process::exit(2);
    };
    match decompress_html_file(&path) {
        Ok(page) => println!("{page}"),
        Err(Error::Header(_)) => println!("Could not find the byte array in the header file."),
        Err(err) => println!("An error occurred: {err}"),
    }
}
