use std::time::Instant;

use crate::editor::{EditorSession, Update};
use crate::model::{ColorGrid, GridPos, Region};

use super::{EditScript, EditStep, Result, ScriptReport, StepOutcome};

pub fn run_script(
    script: &EditScript,
    grid: &ColorGrid,
) -> Result<(EditorSession, ScriptReport)> {
    script.validate()?;

    let mut session = EditorSession::new();
    session.install_grid(grid.clone());
    let mut steps = Vec::with_capacity(script.steps.len());

    for step in &script.steps {
        let started = Instant::now();
        let update = apply_step(&mut session, step)?;
        let duration_ms = started.elapsed().as_millis();
        steps.push(StepOutcome {
            op: step.op_name().to_string(),
            duration_ms,
            changed: update != Update::none(),
        });
    }

    let summary = session.summary().expect("session seeded with a grid");
    let report = ScriptReport {
        script_name: script.name.clone(),
        steps,
        summary,
    };
    Ok((session, report))
}

fn apply_step(session: &mut EditorSession, step: &EditStep) -> Result<Update> {
    let update = match step {
        EditStep::SetCell { row, col, color } => {
            session.recolor(GridPos::new(*row, *col), *color)?
        }
        EditStep::Crop {
            min_row,
            max_row,
            min_col,
            max_col,
        } => {
            let region = Region {
                min_row: *min_row,
                max_row: *max_row,
                min_col: *min_col,
                max_col: *max_col,
            };
            session.apply_crop(region)?
        }
        EditStep::Select { color } => session.select_color(*color),
        EditStep::ClearSelection => session.clear_selection(),
    };
    Ok(update)
}
