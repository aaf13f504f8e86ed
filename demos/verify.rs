use cidr_range::{ipv4_range_verify, CidrBlock};

fn main() {
    let cidr = "192.168.1.0/24";
    let range = match cidr.parse::<CidrBlock>().and_then(|b| b.to_range()) {
        Ok(range) => range,
        Err(e) => {
            eprintln!("Error parsing CIDR block: {}", e);
            return;
        }
    };
    println!(
        "CIDR block {} ranges from {} to {}",
        cidr,
        range.start(),
        range.end()
    );

    for ip in &["192.168.1.134", "192.168.2.10", "256.256.256.256"] {
        match ipv4_range_verify(cidr, ip) {
            Ok(within) => println!("IP address '{}' is within CIDR block '{}': {}", ip, cidr, within),
            Err(e) => println!("Error verifying IP address '{}': {}", ip, e),
        }
    }
}
