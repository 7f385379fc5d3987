// What you SEE:
// • A blank canvas. Drag with Left Mouse to draw in the primary color,
//   Right Mouse for the secondary color. The stroke is smoothed live.
// • 1/2/3: round / thin / square tip.  N/D/S/E: normal / difference / source / eraser.
// • H toggles dashes, M toggles smoothing. C clears, P saves a PNG. ESC quits.
// • The window title shows the current pencil status.

use log::{error, info, warn};
use minifb::Key;

use smooth_pencil::config::Config;
use smooth_pencil::draw::Drawer;
use smooth_pencil::input::{PointerEvent, PointerTracker};
use smooth_pencil::types::FrameBuffer;
use smooth_pencil::{Error, OperationLog, PencilOperator, PencilShape, PencilTool, Surface};

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();
    if let Err(e) = run() {
        error!("{e}");
        std::process::exit(1);
    }
}

fn run() -> Result<(), Error> {
    let config = Config::load()?;
    let (w, h) = (config.window.width, config.window.height);
    info!("canvas {}x{}, pencil {:?}", w, h, config.pencil);

    let mut drawer = Drawer::new(&config.window.title, w as usize, h as usize)?;
    let mut surface = Surface::new(w, h, config.background())?;
    let mut screen = FrameBuffer::new(w as usize, h as usize);

    let inputs = config.brush.tool_inputs();
    let mut tool = PencilTool::new(config.pencil);
    let mut history = OperationLog::new();
    let mut pointer = PointerTracker::new();

    let mut title = String::new();

    /* ------------------------------ Main loop ------------------------------ */
    while drawer.is_open() && !drawer.esc_pressed() {
        /* 1) Options hotkeys. Visual: the title updates, the next stroke looks different. */
        if drawer.key_pressed_once(Key::Key1) { tool.set_shape(PencilShape::Round); }
        if drawer.key_pressed_once(Key::Key2) { tool.set_shape(PencilShape::Thin); }
        if drawer.key_pressed_once(Key::Key3) { tool.set_shape(PencilShape::Square); }
        if drawer.key_pressed_once(Key::N) { tool.set_operator(PencilOperator::Normal); }
        if drawer.key_pressed_once(Key::D) { tool.set_operator(PencilOperator::Difference); }
        if drawer.key_pressed_once(Key::S) { tool.set_operator(PencilOperator::Source); }
        if drawer.key_pressed_once(Key::E) { tool.set_operator(PencilOperator::Eraser); }
        if drawer.key_pressed_once(Key::H) {
            let dashed = !tool.options().dashed;
            tool.set_dashed(dashed);
        }
        if drawer.key_pressed_once(Key::M) {
            let smoothed = !tool.options().smoothed;
            tool.set_smoothed(smoothed);
        }

        /* 2) Canvas commands (ignored mid-stroke). */
        if !tool.is_drawing() {
            if drawer.key_pressed_once(Key::C) {
                surface.clear(config.background());
                history.clear();
                info!("canvas cleared");
            }
            if drawer.key_pressed_once(Key::P) {
                match surface.save_png(&config.canvas.export_path) {
                    Ok(()) => info!("saved {}", config.canvas.export_path.display()),
                    Err(e) => warn!("{e}"),
                }
            }
        }

        /* 3) Pointer -> pencil. Visual: the preview stroke follows the mouse. */
        match pointer.update(drawer.pointer_state()) {
            Some(PointerEvent::Press { pos, button }) => tool.press(pos, button, &inputs),
            Some(PointerEvent::Motion { pos }) => {
                tool.motion(pos, &mut surface);
            }
            Some(PointerEvent::Release { pos }) => {
                if let Some(points @ 2..) = tool.release(pos, &mut surface, &mut history) {
                    info!("stroke {} committed ({} points)", history.operations().len(), points);
                }
            }
            None => {}
        }

        /* 4) Title + present. */
        let status = format!(
            "{} - {} - {}",
            config.window.title,
            tool.status_label(),
            tool.options().operator.label()
        );
        if status != title {
            drawer.set_title(&status);
            title = status;
        }
        surface.write_frame(&mut screen);
        drawer.present(&screen)?;
    }

    Ok(())
}
