/// Container extraction command.
pub mod extract;
