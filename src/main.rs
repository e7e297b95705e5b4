use log::info;

use boardprobe::config::Config;
use boardprobe::detector::Detector;

fn main() {
    let conf = Config::from_any().unwrap_or_default();

    // Setup simplelog
    boardprobe::log::setup(&conf.log);

    let detection = Detector::with_conf(&conf.detection).identify();

    info!("Board: {:?}", detection.kind);
    println!("{}", serde_json::to_string(&detection).unwrap());
}
