//! Cascade picker demo.
//!
//! Drives a three-column dropdown menu with a scripted tap sequence and a
//! console renderer, so the whole open/commit/dismiss flow can be watched
//! from a terminal:
//! - column 0: sort orders (tap, then commit a row)
//! - column 1: status filters (open, then dismiss via the backdrop)
//! - column 2: a custom panel replacing the row list
//!
//! Run with: cargo run -p cascade --example picker

use std::sync::Arc;
use std::time::Duration;

use cascade::ObjectTreeDebug;
use cascade::prelude::*;

/// Renders by describing every op to the log.
#[derive(Default)]
struct ConsoleRenderer {
    ops: usize,
}

impl Renderer for ConsoleRenderer {
    fn fill_rect(&mut self, rect: Rect, color: Color) {
        self.ops += 1;
        tracing::debug!(
            "fill_rect ({:.0},{:.0} {:.0}x{:.0}) a={:.2}",
            rect.left(),
            rect.top(),
            rect.width(),
            rect.height(),
            color.a
        );
    }

    fn stroke_rect(&mut self, rect: Rect, stroke: &Stroke) {
        self.ops += 1;
        tracing::debug!(
            "stroke_rect ({:.0},{:.0} {:.0}x{:.0}) w={}",
            rect.left(),
            rect.top(),
            rect.width(),
            rect.height(),
            stroke.width
        );
    }

    fn draw_line(&mut self, from: Point, to: Point, _stroke: &Stroke) {
        self.ops += 1;
        tracing::debug!(
            "draw_line ({:.0},{:.0})-({:.0},{:.0})",
            from.x,
            from.y,
            to.x,
            to.y
        );
    }

    fn fill_path(&mut self, path: &Path, _color: Color) {
        self.ops += 1;
        if let Some(bounds) = path.bounding_box() {
            tracing::debug!(
                "fill_path around ({:.0},{:.0})",
                bounds.center().x,
                bounds.center().y
            );
        }
    }

    fn draw_text(&mut self, text: &str, _font: &Font, origin: Point, _color: Color) {
        self.ops += 1;
        tracing::debug!("draw_text {:?} at ({:.0},{:.0})", text, origin.x, origin.y);
    }
}

/// A fixed-height panel standing in for custom column content.
struct RangePanel;

impl CustomPanel for RangePanel {
    fn height(&self) -> f32 {
        120.0
    }

    fn paint(&self, ctx: &mut PaintContext<'_>) {
        let rect = ctx.rect();
        ctx.renderer()
            .fill_rect(rect, Color::from_rgb(0.95, 0.95, 1.0));
        ctx.renderer().draw_text(
            "custom range panel",
            &Font::default(),
            Point::new(rect.left() + 15.0, rect.top() + 50.0),
            Color::BLACK,
        );
    }
}

struct Screen {
    base: ObjectBase,
}

impl Screen {
    fn new() -> Self {
        let screen = Self {
            base: ObjectBase::new::<Self>(),
        };
        screen.base.set_name("screen");
        screen
    }
}

impl Object for Screen {
    fn object_id(&self) -> ObjectId {
        self.base.id()
    }
}

/// Advance the menu in 16 ms frames until its animation settles, painting
/// each frame.
fn run_frames(menu: &mut DropDownMenu, renderer: &mut ConsoleRenderer) {
    let mut frames = 0;
    while menu.is_animating() {
        menu.advance(Duration::from_millis(16));
        let mut ctx = PaintContext::new(renderer, menu.widget_base().geometry());
        menu.paint(&mut ctx);
        frames += 1;
    }
    tracing::info!(frames, "animation settled");
}

fn main() {
    tracing_subscriber::fmt::init();
    init_global_registry();

    let screen = Screen::new();

    let model: Arc<dyn MenuModel> = Arc::new(
        StaticMenuModel::new()
            .with_column("Sort", ["Newest", "Oldest", "Price", "Rating"])
            .with_column("Status", ["All", "Open", "Closed"])
            .with_panel_column("Range", Arc::new(RangePanel)),
    );

    let mut menu = DropDownMenu::new(Point::new(0.0, 80.0), 44.0, Size::new(320.0, 640.0))
        .with_theme(MenuTheme::default().with_indicator(Color::from_rgb8(40, 40, 40)))
        .with_model(&model);
    menu.widget_base()
        .set_parent(Some(screen.object_id()))
        .expect("attach menu to screen");

    menu.row_selected.connect(|path| {
        tracing::info!(column = path.column, row = path.row, "row selected");
    });

    let mut renderer = ConsoleRenderer::default();

    tracing::info!("tap the Sort column");
    menu.tap_at(Point::new(40.0, 100.0));
    run_frames(&mut menu, &mut renderer);

    let tree = ObjectTreeDebug::new()
        .format_tree(screen.object_id())
        .expect("dump object tree");
    println!("--- view tree while open ---\n{tree}");

    tracing::info!("commit the second row");
    menu.tap_at(Point::new(40.0, 184.0));
    run_frames(&mut menu, &mut renderer);
    println!(
        "Sort column now titled {:?}",
        menu.column(0).map(|c| c.title().to_string()).unwrap_or_default()
    );

    tracing::info!("open Status, then dismiss via the backdrop");
    menu.tap_at(Point::new(160.0, 100.0));
    run_frames(&mut menu, &mut renderer);
    menu.tap_at(Point::new(160.0, 500.0));
    run_frames(&mut menu, &mut renderer);

    tracing::info!("open the custom Range panel");
    menu.tap_at(Point::new(280.0, 100.0));
    run_frames(&mut menu, &mut renderer);
    println!(
        "Range list height: {} (panel-sized, not row-sized)",
        menu.row_list().widget_base().height()
    );
    menu.dismiss();
    run_frames(&mut menu, &mut renderer);

    println!("total render ops: {}", renderer.ops);
}
