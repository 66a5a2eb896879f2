pub(crate) mod agent;
pub(crate) mod console;
pub(crate) mod error;
pub mod game;

#[allow(unused)]
pub mod prelude
{
    pub use std::str::FromStr;

    pub use log::{self};

    pub use crate::{
        agent::*,
        console::{ConsoleOptions, Server},
        error::{Error, Kind, Result},
        game::*,
    };
}
