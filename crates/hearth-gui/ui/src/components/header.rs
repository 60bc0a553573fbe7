use chrono_tz::Tz;
use yew::{
  Html,
  Properties,
  function_component,
  html
};

use super::{
  BoardSwitcher,
  LiveClock,
  NotificationBell,
  OverflowMenu,
  PomodoroSummary,
  SalatTrigger,
  TitleEditor,
  ViewSwitcher
};

#[derive(Properties, PartialEq)]
pub struct HeaderProps {
  pub zone: Option<Tz>
}

#[function_component(Header)]
pub fn header(
  props: &HeaderProps
) -> Html {
  html! {
      <header class="header">
          <BoardSwitcher />
          <TitleEditor />
          <ViewSwitcher />
          <div class="header-spacer"></div>
          <LiveClock zone={props.zone} />
          <PomodoroSummary zone={props.zone} />
          <SalatTrigger zone={props.zone} />
          <NotificationBell />
          <OverflowMenu />
      </header>
  }
}
