use crate::{BenchError, Clock, MonotonicClock, Stopwatch, TimingSample};
use dbusmenu_bus::{
    parse_layout, MenuBusError, MenuCall, MenuService, PropertyBag, STANDARD_PROPERTIES,
};
use std::io::Write;
use tracing::debug;

/// Runs one pass: `GetLayout(0)`, then `GetChildren` on the layout root,
/// then `GetProperties` on the root's first child.
///
/// Each call starts only once the previous reply is in hand; the recorded
/// time is the wait for that one reply. When `dump` is given, the replies
/// are written to it as they arrive (outside the timed region).
///
/// A layout the ids cannot be read from fails the pass with
/// `MalformedLayout`; no ids are guessed.
pub async fn run_pass<M: MenuService>(
    menu: &M,
    dump: Option<&mut dyn Write>,
) -> Result<TimingSample, BenchError> {
    run_pass_with_clock(menu, dump, MonotonicClock).await
}

/// `run_pass`, timing the calls with `clock`.
pub async fn run_pass_with_clock<M: MenuService, C: Clock>(
    menu: &M,
    mut dump: Option<&mut dyn Write>,
    clock: C,
) -> Result<TimingSample, BenchError> {
    let mut times = TimingSample::default();
    let mut watch = Stopwatch::with_clock(clock);

    let layout = menu.get_layout(0).await?;
    record(&mut times, MenuCall::GetLayout, &watch);
    if let Some(out) = dump.as_deref_mut() {
        writeln!(out, "revision: {}", layout.revision)?;
        writeln!(out, "layout:")?;
        writeln!(out, "{}", layout.layout)?;
    }

    let ids = parse_layout(&layout.layout).map_err(MenuBusError::from)?;
    debug!("Layout root {} first child {}", ids.root_id, ids.child_id);

    watch.reset();
    let children = menu.get_children(ids.root_id, &STANDARD_PROPERTIES).await?;
    record(&mut times, MenuCall::GetChildren, &watch);
    if let Some(out) = dump.as_deref_mut() {
        writeln!(out, "children:")?;
        for child in children.iter() {
            writeln!(out, "- {}:", child.id)?;
            write_properties(out, &child.properties, " ")?;
        }
    }

    watch.reset();
    let properties = menu.get_properties(ids.child_id, &STANDARD_PROPERTIES).await?;
    record(&mut times, MenuCall::GetProperties, &watch);
    if let Some(out) = dump.as_deref_mut() {
        writeln!(out, "properties:")?;
        write_properties(out, &properties, "")?;
    }

    Ok(times)
}

fn record<C: Clock>(times: &mut TimingSample, call: MenuCall, watch: &Stopwatch<C>) {
    let elapsed = watch.peek_duration();
    debug!("{call} took {elapsed:?}");
    times.record(call, elapsed.as_secs_f64());
}

fn write_properties(
    out: &mut dyn Write,
    properties: &PropertyBag,
    prefix: &str,
) -> std::io::Result<()> {
    for (name, value) in properties.iter() {
        writeln!(out, "{prefix}- {name}: {value}")?;
    }
    Ok(())
}
