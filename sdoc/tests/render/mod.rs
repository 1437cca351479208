mod containers;
mod document;
mod toc;
