mod analysis;
mod identity;
mod mood_entry;
mod suggestion_type;
