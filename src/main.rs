use std::process;

use structopt::StructOpt;

use substats::client::RedditClient;
use substats::cliopt::CliOpt;
use substats::runner::Runner;
use substats::store::{LogStore, DATA_PATH};

fn main() {
    let opt = CliOpt::from_args();

    // Credential problems abort before any network or file activity.
    let creds = match opt.credentials() {
        Ok(creds) => creds,
        Err(e) => {
            eprintln!("{}", e);
            process::exit(1);
        }
    };

    let runner = Runner::new(
        Box::new(RedditClient::new(creds)),
        LogStore::new(DATA_PATH),
    );

    if let Err(e) = runner.run() {
        println!("Error fetching subscriber count: {}", e);
        process::exit(1);
    }
}
