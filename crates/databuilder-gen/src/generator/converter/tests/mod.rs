mod combinations;
mod support;
