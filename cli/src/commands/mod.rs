mod food;
mod goal;
mod helpers;
mod log;
mod summary;

pub(crate) use food::cmd_food_list;
pub(crate) use goal::{cmd_goal_set, cmd_goal_show};
pub(crate) use log::{cmd_clear, cmd_log, cmd_water};
pub(crate) use summary::{cmd_history, cmd_summary};
