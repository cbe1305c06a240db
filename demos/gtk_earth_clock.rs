#[cfg(feature = "gtk4-adapter")]
fn main() {
    use gtk4 as gtk;
    use gtk4::prelude::*;

    use geoclock_rs::api::ChartEngineConfig;
    use geoclock_rs::core::{Viewport, dataset};
    use geoclock_rs::platform_gtk::GtkChartAdapter;

    let _ = geoclock_rs::telemetry::init_default_tracing();

    let app = gtk::Application::builder()
        .application_id("rs.geoclock.demos.earth_clock")
        .build();

    app.connect_activate(|app| {
        let config = ChartEngineConfig::new(Viewport::new(760, 760));
        let adapter = match GtkChartAdapter::mount(config) {
            Ok(adapter) => adapter,
            Err(err) => {
                eprintln!("failed to mount clock chart: {err}");
                return;
            }
        };

        let status = gtk::Label::new(Some("Click a wedge to inspect its era."));
        {
            let status = status.clone();
            adapter.connect_era_selected(move |selection| {
                status.set_text(&selection.summary());
            });
        }

        let events_list = gtk::ListBox::new();
        events_list.set_selection_mode(gtk::SelectionMode::None);
        match dataset::event_list() {
            Ok(events) => {
                for event in events.events() {
                    let row = gtk::Label::new(Some(&event.list_label()));
                    row.set_halign(gtk::Align::Start);
                    events_list.append(&row);
                }
            }
            Err(err) => eprintln!("failed to load event list: {err}"),
        }
        let events_scroll = gtk::ScrolledWindow::builder()
            .child(&events_list)
            .min_content_width(320)
            .build();

        let content = gtk::Box::new(gtk::Orientation::Horizontal, 12);
        content.append(adapter.drawing_area());
        content.append(&events_scroll);

        let column = gtk::Box::new(gtk::Orientation::Vertical, 8);
        column.append(&content);
        column.append(&status);

        let window = gtk::ApplicationWindow::builder()
            .application(app)
            .title("Earth's History in 24 Hours")
            .default_width(1120)
            .default_height(800)
            .build();
        window.set_child(Some(&column));

        // The adapter must outlive the window; hold it in the close handler.
        window.connect_close_request(move |_| {
            adapter.unmount();
            gtk::glib::Propagation::Proceed
        });
        window.present();
    });

    let _ = app.run();
}

#[cfg(not(feature = "gtk4-adapter"))]
fn main() {
    println!("run with: cargo run --features desktop --example gtk_earth_clock");
}
