mod content_type;
mod options;
mod values;
