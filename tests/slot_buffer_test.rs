//! Integration tests for slot reuse in SlotBuf

use rdutil::SlotBuf;

#[derive(Debug, Default, Clone, PartialEq)]
struct Member {
    name: String,
    score: f64,
}

#[test]
fn test_sequential_writes_land_in_order() {
    let mut buf: SlotBuf<Member> = SlotBuf::new();
    let names = ["alice", "bob", "carol", "dave"];

    let mut next = buf.next_elem();
    for (i, name) in names.iter().enumerate() {
        let member = next.next();
        member.name = name.to_string();
        member.score = i as f64 * 1.5;
    }

    assert_eq!(buf.len(), names.len());
    for (i, member) in buf.iter().enumerate() {
        assert_eq!(member.name, names[i]);
        assert_eq!(member.score, i as f64 * 1.5);
    }
}

#[test]
fn test_each_call_extends_length_by_one() {
    let mut buf: SlotBuf<u8> = SlotBuf::from(vec![1, 2, 3, 4]);
    buf.truncate(2);

    let mut next = buf.next_elem();
    for expected_len in 3..=8 {
        *next.next() = 0xaa;
        assert_eq!(next.len(), expected_len);
    }
    assert_eq!(next.reused(), 2);
    assert_eq!(next.grown(), 4);

    assert_eq!(buf.as_slice(), &[1, 2, 0xaa, 0xaa, 0xaa, 0xaa, 0xaa, 0xaa]);
}

#[test]
fn test_boxed_slots_are_never_absent() {
    let mut buf: SlotBuf<Option<Box<Member>>> = SlotBuf::from(vec![
        Some(Box::new(Member {
            name: "stale".to_string(),
            score: 9.0,
        })),
        None,
        None,
    ]);
    buf.clear();

    let mut next = buf.next_ptr_elem();
    assert_eq!(next.next().name, "stale");
    let fresh = next.next();
    assert_eq!(*fresh, Member::default());
    fresh.name = "filled".to_string();
    next.next();
    next.next().score = 2.0;
    assert_eq!(next.reused(), 3);
    assert_eq!(next.grown(), 1);

    assert_eq!(buf.len(), 4);
    assert!(buf.iter().all(Option::is_some));
    assert_eq!(buf[1].as_ref().unwrap().name, "filled");
    assert_eq!(buf[3].as_ref().unwrap().score, 2.0);
}

#[test]
fn test_into_vec_keeps_only_live_elements() {
    let mut buf: SlotBuf<String> = SlotBuf::new();
    {
        let mut next = buf.next_elem();
        next.next().push_str("a");
        next.next().push_str("b");
        next.next().push_str("c");
    }
    buf.truncate(1);
    assert_eq!(buf.spare(), 2);

    assert_eq!(buf.into_vec(), vec!["a".to_string()]);
}
