mod args;
mod batch;
mod config;
mod entry;
mod error;
mod history;
mod http;
mod monitor;
mod probe;
mod system;
mod tools;

use error::AppResult;

fn main() -> AppResult<()> {
    entry::run()
}
