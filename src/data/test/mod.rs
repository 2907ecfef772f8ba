mod cart;
mod cleaning;
mod duty;
mod permission;
mod program;
mod publisher;
mod talk;
mod territory;
mod user;
