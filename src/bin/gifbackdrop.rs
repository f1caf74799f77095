use clap::Parser;

use gifbackdrop::{NativePicker, PipelineOutcome, collect_parameters, run_pipeline};

/// Interactive GIF background compositor.
///
/// All run parameters are collected through dialogs and console prompts;
/// there are no configuration flags.
#[derive(Parser, Debug)]
#[command(name = "gifbackdrop", version, about)]
struct Cli {}

fn main() -> anyhow::Result<()> {
    let _cli = Cli::parse();

    println!("GIF 배경화면 변환 프로그램");

    let picker = NativePicker;
    let stdin = std::io::stdin();
    let mut input = stdin.lock();
    let mut output = std::io::stdout();

    let Some(params) = collect_parameters(&picker, &mut input, &mut output)? else {
        return Ok(());
    };

    match run_pipeline(&params)? {
        PipelineOutcome::Written(path) => println!("GIF 생성 완료: {}", path.display()),
        PipelineOutcome::NoFrames => println!("GIF 생성 실패"),
    }

    Ok(())
}
