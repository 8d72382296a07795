// client/src/ui/table.rs
use iced::{Element, Length};
use iced_widget::{column, container};

use crate::app::App;
use crate::messages::Msg;
use crate::ui::actions::render_action_bar;
use crate::ui::admin::admin_panel;
use crate::ui::canvas::felt;
use crate::ui::header::header_view;
use crate::ui::theme::plate;

/// Main table UI view combining header, felt and the betting panel
pub fn full_table_view(app: &App) -> Element<'_, Msg> {
    let snapshot = app.snapshot.as_ref();

    let mut panel = column![render_action_bar(snapshot, &app.bet, app.app_state.is_connected())].spacing(10);
    if let Some(table_name) = &app.admin_of {
        panel = panel.push(admin_panel(table_name, &app.admin_input));
    }

    column![
        header_view(snapshot, app.app_state.status_line()),
        container(felt(snapshot.cloned()))
            .width(Length::Fill)
            .height(Length::FillPortion(3)),
        container(panel)
            .padding(12)
            .width(Length::Fill)
            .style(|_| plate()),
    ]
    .spacing(6)
    .width(Length::Fill)
    .height(Length::Fill)
    .into()
}
