//! Keyword tables for Oracle PL/SQL, one phrase per line.

pub(crate) const PLSQL_RESERVED_TOP_LEVEL_KEYWORDS: &str = "ADD
ALTER COLUMN
ALTER TABLE
BEGIN
CONNECT BY
DECLARE
DELETE FROM
DELETE
EXCEPT
EXCEPTION
FETCH FIRST
FROM
GROUP BY
HAVING
INSERT INTO
INSERT
LIMIT
LOOP
MODIFY
ORDER BY
RETURNING
SELECT
SET CURRENT SCHEMA
SET SCHEMA
SET
START WITH
UPDATE
VALUES
WHERE
";

pub(crate) const PLSQL_RESERVED_NEWLINE_KEYWORDS: &str = "AND
CROSS APPLY
CROSS JOIN
ELSE
ELSIF
FULL JOIN
FULL OUTER JOIN
INNER JOIN
JOIN
LEFT JOIN
LEFT OUTER JOIN
NATURAL JOIN
OR
OUTER APPLY
RIGHT JOIN
RIGHT OUTER JOIN
WHEN
XOR
";

pub(crate) const PLSQL_RESERVED_KEYWORDS: &str = "ALL
ALTER
ANY
AS
ASC
BETWEEN
BULK COLLECT
BY
CASCADE
CAST
CHECK
CLUSTER
COLUMN
COMMENT
COMPRESS
CONSTRAINT
CREATE
CURRENT
CURSOR
DEFAULT
DESC
DISTINCT
DROP
EACH
ESCAPE
EXCLUSIVE
EXISTS
FOR
FORALL
FOREIGN KEY
FUNCTION
GRANT
GROUP
IDENTIFIED
IF
IMMEDIATE
IN
INCREMENT
INDEX
INITIAL
INTERVAL
INTO
IS
LEVEL
LIKE
LOCK
MAXEXTENTS
MODE
NOAUDIT
NOCOMPRESS
NOT
NOWAIT
NULL
OF
OFFLINE
ON
ONLINE
OPTION
ORDER
OVER
PARTITION BY
PCTFREE
PRIMARY KEY
PRIOR
PRIVILEGES
PROCEDURE
PUBLIC
RAISE
RENAME
RESOURCE
RETURN
REVOKE
ROW
ROWID
ROWNUM
ROWS
SESSION
SHARE
SIZE
SYNONYM
SYSDATE
TABLE
THEN
TO
TRIGGER
UID
UNIQUE
USER
VALIDATE
VIEW
WHENEVER
WITH
";
