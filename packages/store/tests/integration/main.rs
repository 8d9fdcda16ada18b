mod cascade;
mod common;
mod ids;
mod learner;
mod persistence;
mod transfer;
