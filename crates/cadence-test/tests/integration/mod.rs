mod cli;
mod helpers;
mod repeat_manager;
