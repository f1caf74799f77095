use std::io::{BufRead, Write};

use anyhow::Context as _;

use crate::dialog::FilePicker;
use crate::error::{BackdropError, BackdropResult};
use crate::params::{self, Canvas, InvalidEntry, RunParameters};

const MSG_NO_FILE: &str = "파일이 선택되지 않았습니다.";
const MSG_NO_FOLDER: &str = "폴더가 선택되지 않았습니다.";
const PROMPT_WIDTH: &str = "너비 (픽셀): ";
const PROMPT_HEIGHT: &str = "높이 (픽셀): ";
const PROMPT_INTERVAL: &str = "프레임 간격(밀리초): ";
const PROMPT_PLACEMENT: &str = "이미지를 배치할 높이 비율 (0.0 ~ 1.0): ";
const PROMPT_WIDTH_RATIO: &str = "이미지 너비 비율 (0.0 ~ 1.0): ";
const RETRY_NUMBER: &str = "올바른 숫자를 입력하세요.";
const RETRY_RATIO: &str = "0과 1 사이의 값을 입력하세요.";

/// Print `label`, read one line, parse it; repeat with `retry` on rejection.
///
/// Never returns an invalid value and never caps the retry count. Closed
/// stdin is an I/O error, not a value.
pub fn read_until_valid<T>(
    input: &mut dyn BufRead,
    output: &mut dyn Write,
    label: &str,
    retry: &str,
    parse: impl Fn(&str) -> Result<T, InvalidEntry>,
) -> BackdropResult<T> {
    loop {
        write!(output, "{label}").context("write console prompt")?;
        output.flush().context("flush console prompt")?;

        let mut line = String::new();
        let read = input.read_line(&mut line).context("read console input")?;
        if read == 0 {
            return Err(BackdropError::validation("console input closed before a value was entered"));
        }

        match parse(&line) {
            Ok(value) => return Ok(value),
            Err(_) => {
                writeln!(output, "{retry}").context("write retry message")?;
            }
        }
    }
}

/// Gather one run's worth of parameters through dialogs and console prompts.
///
/// Returns `Ok(None)` when a dialog is cancelled; the cancellation message
/// has already been written to `output` in that case.
pub fn collect_parameters(
    picker: &dyn FilePicker,
    input: &mut dyn BufRead,
    output: &mut dyn Write,
) -> BackdropResult<Option<RunParameters>> {
    let Some(source) = picker.choose_gif() else {
        writeln!(output, "{MSG_NO_FILE}").context("write cancellation message")?;
        return Ok(None);
    };
    let Some(dest_dir) = picker.choose_dest_dir() else {
        writeln!(output, "{MSG_NO_FOLDER}").context("write cancellation message")?;
        return Ok(None);
    };

    let width = read_until_valid(input, output, PROMPT_WIDTH, RETRY_NUMBER, params::parse_pixels)?;
    let height = read_until_valid(input, output, PROMPT_HEIGHT, RETRY_NUMBER, params::parse_pixels)?;
    let interval_ms = read_until_valid(
        input,
        output,
        PROMPT_INTERVAL,
        RETRY_NUMBER,
        params::parse_interval_ms,
    )?;
    let placement_ratio = read_until_valid(
        input,
        output,
        PROMPT_PLACEMENT,
        RETRY_RATIO,
        params::parse_placement_ratio,
    )?;
    let width_ratio = read_until_valid(
        input,
        output,
        PROMPT_WIDTH_RATIO,
        RETRY_RATIO,
        params::parse_width_ratio,
    )?;

    Ok(Some(RunParameters {
        source,
        dest_dir,
        canvas: Canvas::new(width, height)?,
        interval_ms,
        placement_ratio,
        width_ratio,
    }))
}
