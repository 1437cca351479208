mod autosave;
mod current;
mod save;
