#[cfg(test)]
pub mod rpcclient_tests;

#[cfg(test)]
use std::sync::Once;

#[cfg(test)]
static INIT: Once = Once::new();

#[cfg(test)]
fn init() {
    // ignore error
    INIT.call_once(|| {
        use rpcclient_common::conf::RpcClientConf;
        use rpcclient_common::logger;

        let mut conf = RpcClientConf::default();
        conf.log_level = "trace".to_owned();
        logger::init_with_conf(&conf).expect("initializing logger for the first time");
    });
}
