mod common;
mod lifecycle;
mod lookup;
