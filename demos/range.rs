use cidr_range::{ipv4_to_range, single_ipv4_to_u32, CidrBlock};
use std::env;

fn main() {
    let args: Vec<String> = env::args().skip(1).collect();
    let blocks = if args.is_empty() {
        vec!["10.0.0.0/8".to_owned()]
    } else {
        args
    };
    for cidr in &blocks {
        match cidr.parse::<CidrBlock>().and_then(|b| ipv4_to_range(&b)) {
            Ok(range) => println!(
                "{}\t{}\t{}\t{} addresses",
                cidr,
                range.start(),
                range.end(),
                range.size()
            ),
            Err(e) => eprintln!("{}: {}", cidr, e),
        }
    }

    let ip = "192.168.1.1";
    match single_ipv4_to_u32(ip) {
        Ok(n) => println!("IP {} as uint32: {}", ip, n),
        Err(e) => println!("Error: {}", e),
    }
}
