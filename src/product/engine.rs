use std::path::Path;
use std::sync::Arc;

use raylib::prelude::*;
use tracing::{info, warn};

use crate::constants::*;
use crate::engine::View;
use crate::geometry::Rect;
use crate::input::{DragTracker, FrameInput, PointerRelease};
use crate::order::message::format_rupiah;
use crate::order::{Field, LinkOpener, OrderChannel, OrderForm, Product, SubmitOutcome, Submitter};
use crate::product::carousel::Carousel;
use crate::product::layout::{ModalLayout, ProductLayout};
use crate::state::Screen;
use crate::texture_loader::{load_sorted_image_paths, load_texture_with_exif_rotation};
use crate::transition::SlideTransition;
use crate::ui::{self, Gradient, hex, hex_alpha};

const PANEL_BACKGROUNDS: [Gradient; 3] = [
    Gradient::new(0xef4444, 0xdc2626, 0xf97316),
    Gradient::new(0xf97316, 0xea580c, 0xdc2626),
    Gradient::new(0xeab308, 0xf97316, 0xef4444),
];
const PAGE_BACKGROUND: Gradient = Gradient::new(0x111827, 0x1f2937, 0x450a0a);

/// One carousel page: a gradient, and the product photo on top when available.
pub struct ProductPanel {
    pub background: Gradient,
    pub image: Option<Texture2D>,
}

impl ProductPanel {
    /// Loads product photos from `dir`. Without photos the carousel still
    /// shows one gradient page per background.
    pub fn load_all(rl: &mut RaylibHandle, thread: &RaylibThread, dir: &Path) -> Vec<ProductPanel> {
        let paths = match load_sorted_image_paths(dir) {
            Ok(paths) => paths,
            Err(e) => {
                warn!(error = %e, "no product images, showing backgrounds only");
                Vec::new()
            }
        };

        let mut textures = Vec::new();
        for path in paths {
            match load_texture_with_exif_rotation(rl, thread, &path) {
                Ok(texture) => textures.push(texture),
                Err(e) => warn!(error = %e, "skipping product image"),
            }
        }

        if textures.is_empty() {
            return PANEL_BACKGROUNDS.iter().map(|&background| ProductPanel { background, image: None }).collect();
        }
        textures
            .into_iter()
            .enumerate()
            .map(|(i, texture)| ProductPanel {
                background: PANEL_BACKGROUNDS[i % PANEL_BACKGROUNDS.len()],
                image: Some(texture),
            })
            .collect()
    }
}

/// Product card with carousel and the order modal. Runs until the window closes.
pub struct ProductView {
    product: Product,
    panels: Vec<ProductPanel>,
    carousel: Carousel,
    drag: DragTracker,
    transition: Option<SlideTransition>,
    modal: Option<OrderForm>,
    backdrop_press: bool,
    submitter: Submitter,
    opener: Box<dyn LinkOpener>,
    layout: ProductLayout,
    modal_layout: ModalLayout,
}

impl ProductView {
    pub fn new(
        product: Product,
        panels: Vec<ProductPanel>,
        channel: Arc<dyn OrderChannel>,
        opener: Box<dyn LinkOpener>,
    ) -> Self {
        let (w, h) = (WINDOW_WIDTH as f32, WINDOW_HEIGHT as f32);
        Self {
            product,
            carousel: Carousel::new(panels.len(), CAROUSEL_SWIPE_THRESHOLD),
            panels,
            drag: DragTracker::default(),
            transition: None,
            modal: None,
            backdrop_press: false,
            submitter: Submitter::new(channel),
            opener,
            layout: ProductLayout::new(w, h),
            modal_layout: ModalLayout::new(w, h),
        }
    }

    pub fn carousel(&self) -> &Carousel {
        &self.carousel
    }

    pub fn modal(&self) -> Option<&OrderForm> {
        self.modal.as_ref()
    }

    fn moved(&mut self, from: Option<usize>) {
        if let Some(from) = from {
            if from != self.carousel.current_index() {
                self.transition = Some(SlideTransition::new(from, self.carousel.direction()));
            }
        }
    }

    fn open_modal(&mut self) {
        info!("order form opened");
        self.backdrop_press = false;
        self.modal = Some(OrderForm::new());
    }

    fn close_modal(&mut self) {
        if self.modal.as_ref().is_some_and(OrderForm::can_close) {
            info!("order form closed");
            self.modal = None;
        }
    }

    fn poll_submission(&mut self) {
        let Some((order, result)) = self.submitter.poll() else {
            return;
        };
        let Some(form) = self.modal.as_mut() else {
            return;
        };
        if let SubmitOutcome::Sent { .. } =
            form.finish_submit(&order, result, self.submitter.channel(), self.opener.as_ref())
        {
            self.modal = None;
        }
    }

    fn submit(&mut self) {
        let Some(form) = self.modal.as_mut() else {
            return;
        };
        let Some(order) = form.begin_submit() else {
            return;
        };
        if let Err(e) = self.submitter.start(order) {
            form.fail(&e);
        }
    }

    fn update_carousel(&mut self, input: &FrameInput, dt: f32) {
        if input.pressed {
            self.drag.press(input.pointer);
        } else if input.down {
            self.drag.track(input.pointer, dt);
        }

        if !input.released {
            return;
        }
        let from_image = self.drag.started_in(&self.layout.image);
        match self.drag.release(input.pointer) {
            Some(PointerRelease::Tap(at)) => {
                if self.layout.prev_arrow.contains(at) {
                    let from = self.carousel.paginate(-1);
                    self.moved(from);
                } else if self.layout.next_arrow.contains(at) {
                    let from = self.carousel.paginate(1);
                    self.moved(from);
                } else if let Some(k) = self
                    .layout
                    .dots(self.carousel.len(), self.carousel.current_index())
                    .iter()
                    .position(|dot| dot.inset(-6.0).contains(at))
                {
                    let from = self.carousel.go_to(k);
                    self.moved(from);
                } else if self.layout.order_button.contains(at) {
                    self.open_modal();
                }
            }
            Some(PointerRelease::Drag { offset, velocity }) if from_image => {
                let from = self.carousel.swipe(offset, velocity);
                self.moved(from);
            }
            _ => {}
        }
    }

    fn update_modal(&mut self, input: &FrameInput) {
        let m = self.modal_layout;
        if input.pressed {
            self.backdrop_press = !m.panel.contains(input.pointer);
        }
        // Only a press and release both outside the panel dismiss it
        let backdrop_click = input.released && self.backdrop_press && !m.panel.contains(input.pointer);
        if input.released {
            self.backdrop_press = false;
        }
        let Some(form) = self.modal.as_mut() else {
            return;
        };

        if form.alert().is_some() {
            if input.enter || input.escape || input.clicked_in(&m.alert_ok) {
                form.dismiss_alert();
            }
            return;
        }

        if input.escape || input.clicked_in(&m.close) || backdrop_click {
            self.close_modal();
            return;
        }

        if input.tab {
            form.focus_next();
        }
        for &c in &input.typed {
            form.type_char(c);
        }
        if input.backspace {
            form.backspace();
        }

        if input.clicked_in(&m.minus) {
            form.decrement();
        } else if input.clicked_in(&m.plus) {
            form.increment();
        } else if let Some(field) = Field::ALL.into_iter().find(|&f| input.clicked_in(&m.field(f))) {
            form.set_focus(field);
        }

        if input.enter || input.clicked_in(&m.submit) {
            self.submit();
        }
    }

    fn draw_carousel(&self, d: &mut RaylibDrawHandle) {
        let area = self.layout.image;
        {
            let mut s = d.begin_scissor_mode(area.x as i32, area.y as i32, area.width as i32, area.height as i32);
            match &self.transition {
                Some(t) => {
                    if let Some(previous) = self.panels.get(t.from) {
                        draw_panel_page(&mut s, previous, area.shifted(t.outgoing_offset(area.width)));
                    }
                    if let Some(current) = self.panels.get(self.carousel.current_index()) {
                        draw_panel_page(&mut s, current, area.shifted(t.incoming_offset(area.width)));
                    }
                }
                None => {
                    if let Some(current) = self.panels.get(self.carousel.current_index()) {
                        let follow = if self.drag.is_active() && self.modal.is_none() { self.drag.offset_x() } else { 0.0 };
                        draw_panel_page(&mut s, current, area.shifted(follow));
                    }
                }
            }
        }

        for (arrow, glyph) in [(self.layout.prev_arrow, "<"), (self.layout.next_arrow, ">")] {
            let c = arrow.center();
            d.draw_circle(c.x as i32, c.y as i32, arrow.width * 0.5, hex_alpha(0x000000, 76));
            ui::draw_text_centered(d, glyph, arrow, 20, Color::WHITE);
        }

        let active = self.carousel.current_index();
        for (i, dot) in self.layout.dots(self.carousel.len(), active).into_iter().enumerate() {
            let color = if i == active { Color::WHITE } else { hex_alpha(0xffffff, 128) };
            ui::draw_pill(d, dot, color);
        }

        let badge = self.layout.price_badge;
        ui::draw_pill(d, badge, hex(0xfacc15));
        let price = format!("Rp {}", format_rupiah(self.product.unit_price));
        ui::draw_text_centered(d, &price, badge, 16, hex(0x111827));
    }

    fn draw_modal(&self, d: &mut RaylibDrawHandle, form: &OrderForm) {
        let m = &self.modal_layout;
        let screen = self.layout.screen;
        d.draw_rectangle_rec(Rectangle::from(screen), hex_alpha(0x000000, 178));
        ui::draw_panel(d, m.panel, 0.08, hex_alpha(0x1f2937, 250), hex_alpha(0xffffff, 50));

        ui::draw_text_centered(d, "Form Pemesanan", m.title, 22, Color::WHITE);
        d.draw_circle(m.close.center().x as i32, m.close.center().y as i32, m.close.width * 0.5, hex_alpha(0xffffff, 25));
        ui::draw_text_centered(d, "x", m.close, 18, Color::WHITE);

        let labels = [
            (Field::Quantity, "Jumlah"),
            (Field::Name, "Nama"),
            (Field::ClassName, "Kelas"),
            (Field::PickupTime, "Waktu Ambil"),
        ];
        for (field, label) in labels {
            let r = m.label(field);
            d.draw_text(label, r.x as i32, r.y as i32 + 2, 16, hex(0xd1d5db));
            draw_input(d, m.field(field), &form.value(field), form.focus() == field);
        }

        ui::draw_panel(d, m.minus, 0.3, hex_alpha(0xdc2626, 76), hex_alpha(0xdc2626, 128));
        ui::draw_text_centered(d, "-", m.minus, 24, Color::WHITE);
        ui::draw_panel(d, m.plus, 0.3, hex_alpha(0x22c55e, 76), hex_alpha(0x22c55e, 128));
        ui::draw_text_centered(d, "+", m.plus, 24, Color::WHITE);

        let subtotal = format!("= Rp {}", format_rupiah(form.total(self.product.unit_price)));
        ui::draw_text_centered(d, &subtotal, m.subtotal, 16, hex(0xfacc15));

        let (fill, label) = if form.is_submitting() {
            (hex(0x6b7280), "Memproses...")
        } else {
            (hex(0x22c55e), "Kirim & Buka WhatsApp")
        };
        ui::draw_panel(d, m.submit, 0.3, fill, fill);
        ui::draw_text_centered(d, label, m.submit, 18, Color::WHITE);

        if let Some(alert) = form.alert() {
            d.draw_rectangle_rec(Rectangle::from(screen), hex_alpha(0x000000, 120));
            ui::draw_panel(d, m.alert, 0.1, Color::WHITE, hex(0xd1d5db));
            ui::draw_wrapped_centered(d, alert, m.alert.center().x, m.alert.y + 24.0, m.alert.width - 40.0, 18, hex(0x111827));
            ui::draw_panel(d, m.alert_ok, 0.3, hex(0x2563eb), hex(0x2563eb));
            ui::draw_text_centered(d, "OK", m.alert_ok, 18, Color::WHITE);
        }
    }
}

fn draw_panel_page(d: &mut impl RaylibDraw, panel: &ProductPanel, area: Rect) {
    panel.background.draw(d, area);
    if let Some(texture) = &panel.image {
        let source = ui::cover_source(texture.width() as f32, texture.height() as f32, area);
        d.draw_texture_pro(texture, Rectangle::from(source), Rectangle::from(area), Vector2::new(0.0, 0.0), 0.0, Color::WHITE);
    }
}

fn draw_input(d: &mut RaylibDrawHandle, area: Rect, text: &str, focused: bool) {
    let outline = if focused { hex(0xfacc15) } else { hex_alpha(0xffffff, 50) };
    ui::draw_panel(d, area, 0.3, hex_alpha(0xffffff, 25), outline);
    let shown = if focused { format!("{text}_") } else { text.to_string() };
    d.draw_text(&shown, area.x as i32 + 12, (area.y + (area.height - 18.0) * 0.5) as i32, 18, Color::WHITE);
}

impl View for ProductView {
    fn update(&mut self, input: &FrameInput, dt: f32) -> Option<Screen> {
        if input.screen_width > 0.0 && input.screen_height > 0.0 {
            self.layout = ProductLayout::new(input.screen_width, input.screen_height);
            self.modal_layout = ModalLayout::new(input.screen_width, input.screen_height);
        }

        if let Some(t) = self.transition.as_mut() {
            t.update(dt);
            if t.is_done() {
                self.transition = None;
            }
        }

        self.poll_submission();

        if self.modal.is_some() {
            self.drag.cancel();
            self.update_modal(input);
        } else {
            self.update_carousel(input, dt);
        }
        None
    }

    fn draw(&self, d: &mut RaylibDrawHandle) {
        PAGE_BACKGROUND.draw(d, self.layout.screen);

        let card = self.layout.card;
        ui::draw_panel(d, card, 0.08, hex_alpha(0xffffff, 25), hex_alpha(0xffffff, 50));
        self.draw_carousel(d);

        let info = self.layout.info;
        d.draw_text(&self.product.name, info.x as i32, info.y as i32, 28, Color::WHITE);
        ui::draw_wrapped(d, &self.product.description, info.x, info.y + 40.0, info.width, 16, hex(0xd1d5db));

        let button = self.layout.order_button;
        ui::draw_panel(d, button, 0.3, hex(0xdc2626), hex(0xb91c1c));
        ui::draw_text_centered(d, "Order Sekarang", button, 20, Color::WHITE);

        if let Some(form) = &self.modal {
            self.draw_modal(d, form);
        }
    }
}

#[cfg(test)]
mod tests {
    use std::thread;
    use std::time::{Duration, Instant};

    use super::*;
    use crate::geometry::Point;
    use crate::order::channel::tests::{FakeChannel, FakeOpener};
    use crate::order::tests::dumpling;

    /// Shares recorded links with the test after the opener moves into the view.
    struct SharedOpener(Arc<FakeOpener>);

    impl LinkOpener for SharedOpener {
        fn open(&self, url: &str) -> Result<(), crate::order::OrderError> {
            self.0.open(url)
        }
    }

    fn gradient_panels() -> Vec<ProductPanel> {
        PANEL_BACKGROUNDS.iter().map(|&background| ProductPanel { background, image: None }).collect()
    }

    fn view(channel: Arc<FakeChannel>, opener: Arc<FakeOpener>) -> ProductView {
        ProductView::new(dumpling(), gradient_panels(), channel, Box::new(SharedOpener(opener)))
    }

    fn idle() -> FrameInput {
        FrameInput {
            pointer_inside: true,
            screen_width: WINDOW_WIDTH as f32,
            screen_height: WINDOW_HEIGHT as f32,
            ..FrameInput::default()
        }
    }

    fn click(view: &mut ProductView, area: Rect) {
        let at = area.center();
        view.update(&FrameInput { pointer: at, pressed: true, down: true, ..idle() }, FRAME_TIME);
        view.update(&FrameInput { pointer: at, released: true, ..idle() }, FRAME_TIME);
    }

    fn type_text(view: &mut ProductView, text: &str) {
        view.update(&FrameInput { typed: text.chars().collect(), ..idle() }, FRAME_TIME);
    }

    fn fill_order(view: &mut ProductView) {
        let m = view.modal_layout;
        click(view, m.plus);
        click(view, m.plus);
        click(view, m.name);
        type_text(view, "Budi");
        click(view, m.class_name);
        type_text(view, "XII IPA 1");
        click(view, m.pickup_time);
        type_text(view, "Istirahat 1");
    }

    fn wait_for_modal_result(view: &mut ProductView) {
        let deadline = Instant::now() + Duration::from_secs(5);
        while view.modal().is_some_and(OrderForm::is_submitting) {
            assert!(Instant::now() < deadline, "submission never finished");
            thread::sleep(Duration::from_millis(5));
            view.update(&idle(), FRAME_TIME);
        }
    }

    #[test]
    fn arrows_and_dots_drive_carousel() {
        let mut v = view(Arc::new(FakeChannel::succeeding()), Arc::default());
        let layout = v.layout;
        click(&mut v, layout.prev_arrow);
        assert_eq!(v.carousel().current_index(), 2);
        click(&mut v, layout.next_arrow);
        assert_eq!(v.carousel().current_index(), 0);
        let dot = layout.dots(3, 0)[1];
        click(&mut v, dot);
        assert_eq!(v.carousel().current_index(), 1);
    }

    #[test]
    fn swipe_on_image_pages_carousel() {
        let mut v = view(Arc::new(FakeChannel::succeeding()), Arc::default());
        let start = v.layout.image.center();
        let mut x = start.x;
        v.update(&FrameInput { pointer: start, pressed: true, down: true, ..idle() }, FRAME_TIME);
        for _ in 0..3 {
            x -= 30.0;
            v.update(&FrameInput { pointer: Point::new(x, start.y), down: true, ..idle() }, FRAME_TIME);
        }
        v.update(&FrameInput { pointer: Point::new(x, start.y), released: true, ..idle() }, FRAME_TIME);
        assert_eq!(v.carousel().current_index(), 1);
    }

    #[test]
    fn order_flow_hands_off_and_closes() {
        let channel = Arc::new(FakeChannel::succeeding());
        let opener = Arc::new(FakeOpener::default());
        let mut v = view(channel.clone(), opener.clone());

        let (button, submit) = (v.layout.order_button, v.modal_layout.submit);
        click(&mut v, button);
        assert!(v.modal().is_some());
        fill_order(&mut v);
        assert_eq!(v.modal().map(OrderForm::quantity), Some(3));

        click(&mut v, submit);
        wait_for_modal_result(&mut v);

        assert!(v.modal().is_none());
        let submitted = channel.submitted.lock().unwrap();
        assert_eq!(submitted.len(), 1);
        assert_eq!(submitted[0].name, "Budi");
        let opened = opener.opened.lock().unwrap();
        assert_eq!(opened.len(), 1);
        assert!(opened[0].contains("36.000"));
    }

    #[test]
    fn failed_order_keeps_modal_with_alert() {
        let channel = Arc::new(FakeChannel::failing());
        let opener = Arc::new(FakeOpener::default());
        let mut v = view(channel, opener.clone());

        let (button, submit, ok) = (v.layout.order_button, v.modal_layout.submit, v.modal_layout.alert_ok);
        click(&mut v, button);
        fill_order(&mut v);
        click(&mut v, submit);
        wait_for_modal_result(&mut v);

        let form = v.modal().expect("modal stays open");
        assert_eq!(form.alert(), Some(SUBMIT_FAILED_ALERT));
        assert_eq!(form.name(), "Budi");
        assert!(opener.opened.lock().unwrap().is_empty());

        click(&mut v, ok);
        assert_eq!(v.modal().and_then(OrderForm::alert), None);
    }

    #[test]
    fn unopened_link_still_closes_without_resending() {
        let channel = Arc::new(FakeChannel::succeeding());
        let opener = Arc::new(FakeOpener { fail: true, ..FakeOpener::default() });
        let mut v = view(channel.clone(), opener.clone());

        let (button, submit) = (v.layout.order_button, v.modal_layout.submit);
        click(&mut v, button);
        fill_order(&mut v);
        click(&mut v, submit);
        wait_for_modal_result(&mut v);

        assert!(v.modal().is_none());
        assert_eq!(channel.submitted.lock().unwrap().len(), 1);
        assert_eq!(opener.opened.lock().unwrap().len(), 1);
    }

    #[test]
    fn drag_out_of_panel_keeps_form_open() {
        let mut v = view(Arc::new(FakeChannel::succeeding()), Arc::default());
        let (button, name) = (v.layout.order_button, v.modal_layout.name);
        click(&mut v, button);
        click(&mut v, name);
        type_text(&mut v, "Budi");

        let inside = name.center();
        let outside = Point::new(2.0, 2.0);
        v.update(&FrameInput { pointer: inside, pressed: true, down: true, ..idle() }, FRAME_TIME);
        v.update(&FrameInput { pointer: outside, down: true, ..idle() }, FRAME_TIME);
        v.update(&FrameInput { pointer: outside, released: true, ..idle() }, FRAME_TIME);

        assert_eq!(v.modal().map(OrderForm::name), Some("Budi"));
    }

    #[test]
    fn backdrop_click_closes_and_discards_form() {
        let mut v = view(Arc::new(FakeChannel::succeeding()), Arc::default());
        let button = v.layout.order_button;
        click(&mut v, button);
        type_text(&mut v, "Budi");
        click(&mut v, Rect::new(0.0, 0.0, 4.0, 4.0));
        assert!(v.modal().is_none());

        click(&mut v, button);
        assert_eq!(v.modal().map(OrderForm::name), Some(""));
    }
}
