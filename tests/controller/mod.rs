mod bitcore;
mod node;
mod rc001;
mod router;
