// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Anchored menu positioning.
//!
//! Opens a menu under a button near the right edge of a small viewport, shows how the
//! surface is pulled back inside, then flips to right-to-left and closes it.
//!
//! Run:
//! - `RUST_LOG=debug cargo run -p understory_demos --example menu_positioning`

use kurbo::{Rect, Size};
use understory_list::{ItemFlags, ListItem};
use understory_menu::{CloseMenuEvent, DefaultFocus, Menu, MenuEvent, MenuItem, bubble};
use understory_surface::{
    Direction, PositionRequest, SurfaceHost, SurfacePositionController, SurfaceStyles,
};

#[derive(Copy, Clone, Debug, Eq, PartialEq)]
enum El {
    Button,
    Menu,
}

struct Item {
    headline: &'static str,
    flags: ItemFlags,
}

impl ListItem for Item {
    fn is_active(&self) -> bool {
        self.flags.is_active()
    }
    fn set_active(&mut self, active: bool) {
        self.flags.set_active(active);
    }
    fn is_disabled(&self) -> bool {
        self.flags.is_disabled()
    }
}

impl MenuItem for Item {
    fn headline(&self) -> &str {
        self.headline
    }
}

struct Page {
    menu: Menu<El, Item>,
    direction: Direction,
}

impl SurfaceHost<El> for Page {
    fn properties(&self) -> PositionRequest<El> {
        self.menu.properties()
    }

    fn request_update(&mut self) {}

    fn update_complete(&mut self) -> impl Future<Output = ()> {
        core::future::ready(())
    }

    fn bounding_rect(&self, element: &El) -> Rect {
        match element {
            El::Button => Rect::new(520.0, 16.0, 600.0, 48.0),
            El::Menu => Rect::new(0.0, 0.0, 200.0, 160.0),
        }
    }

    fn direction(&self, _element: &El) -> Direction {
        self.direction
    }

    fn viewport(&self) -> Size {
        Size::new(640.0, 480.0)
    }

    fn on_open(&mut self) {
        self.menu.focus_on_open();
        println!("opened");
    }

    fn on_close(&mut self) {
        println!("closed");
    }
}

fn main() {
    env_logger::init();

    let mut menu = Menu::new();
    menu.items = ["Cut", "Copy", "Paste"]
        .into_iter()
        .map(|headline| Item {
            headline,
            flags: ItemFlags::empty(),
        })
        .collect();
    menu.anchor = Some(El::Button);
    menu.surface = Some(El::Menu);
    menu.fixed = true;
    menu.default_focus = DefaultFocus::FirstItem;

    let mut page = Page {
        menu,
        direction: Direction::Ltr,
    };
    let mut controller = SurfacePositionController::new();

    page.menu.show();
    pollster::block_on(controller.host_updated(&mut page));
    println!("ltr:  {}", controller.surface_styles());

    page.direction = Direction::Rtl;
    page.menu.y_offset = 4.0;
    pollster::block_on(controller.host_updated(&mut page));
    println!("rtl:  {}", controller.surface_styles());

    page.menu.handle_keydown("ArrowDown");
    let active = page.menu.active_item().map(MenuItem::headline);
    println!("active: {active:?}");

    let mut event = MenuEvent::CloseMenu(CloseMenuEvent::click(El::Menu));
    bubble(&mut event, &mut [&mut page.menu]);
    pollster::block_on(controller.host_updated(&mut page));
    assert_eq!(*controller.surface_styles(), SurfaceStyles::Hidden);
}
