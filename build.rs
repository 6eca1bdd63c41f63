use lightningcss::{
    bundler::{Bundler, FileProvider},
    stylesheet::{MinifyOptions, ParserOptions, PrinterOptions},
};
use std::fs;
use std::path::Path;

const CSS_ENTRY: &str = "assets/css/main.css";
const CSS_BUNDLE: &str = "assets/dist/bundle.css";

fn main() {
    println!("cargo:rerun-if-changed=assets/css/");

    fs::create_dir_all("assets/dist").expect("Failed to create assets/dist directory");

    // Resolve @import rules starting from the entry stylesheet
    let fs_provider = FileProvider::new();
    let mut bundler = Bundler::new(&fs_provider, None, ParserOptions::default());
    let mut stylesheet = bundler
        .bundle(Path::new(CSS_ENTRY))
        .unwrap_or_else(|e| panic!("Failed to bundle {CSS_ENTRY}: {e}"));

    stylesheet
        .minify(MinifyOptions::default())
        .expect("Failed to minify dashboard CSS");

    let css = stylesheet
        .to_css(PrinterOptions {
            minify: true,
            ..Default::default()
        })
        .expect("Failed to print dashboard CSS");

    fs::write(CSS_BUNDLE, css.code).unwrap_or_else(|e| panic!("Failed to write {CSS_BUNDLE}: {e}"));
}
