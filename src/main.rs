use voicefaster_build::Config;
use voicefaster_build::dist::PromptConfirm;
use voicefaster_build::pipeline;

fn main() {
    let config = match Config::from_cli() {
        Ok(config) => config,
        Err(err) => {
            println!("Error: {err}");
            return;
        }
    };

    let mut confirm = PromptConfirm::stdio();
    if let Err(err) = pipeline::run(&config, &mut confirm) {
        println!("Error: {err}");
    }
}
